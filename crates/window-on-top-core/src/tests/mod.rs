mod topmost;
